use std::ops::Range;

use crate::state::CatalogState;

/// Outcome of one incremental render step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageRender {
    /// The filtered view is empty and nothing has been rendered yet.
    NoResults,
    /// `filtered[range]` was appended to the display.
    Appended {
        /// Indices into `CatalogState::filtered` that were appended.
        range: Range<usize>,
        /// Whether more items remain after this page.
        has_more: bool,
    },
    /// Everything was already rendered; nothing changed.
    Exhausted,
}

/// Instruction for a display surface produced by a controller operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewUpdate {
    /// Drop every rendered card before applying `page`.
    pub clear: bool,
    /// Page render step to apply after the optional clear.
    pub page: PageRender,
}

/// What: Advance the rendering cursor by at most one page.
///
/// Inputs:
/// - `st`: Catalog state with `filtered`, `rendered_count` and `config.page_size`
///
/// Output:
/// - `ViewUpdate` with `clear = false` describing what to append.
///
/// Details:
/// - Slices `[rendered_count, rendered_count + page_size)` clamped to the end of `filtered`.
/// - Reports `NoResults` only when the view is empty and nothing was rendered yet.
/// - Calling it after exhaustion is a no-op reporting `Exhausted`.
pub fn render_next_page(st: &mut CatalogState) -> ViewUpdate {
    let total = st.filtered.len();
    let start = st.rendered_count.min(total);
    let end = start.saturating_add(st.config.page_size.max(1)).min(total);
    let page = if total == 0 && start == 0 {
        PageRender::NoResults
    } else if start == end {
        PageRender::Exhausted
    } else {
        st.rendered_count = end;
        PageRender::Appended {
            range: start..end,
            has_more: end < total,
        }
    };
    tracing::trace!(start, end, total, "[Catalog] render_next_page");
    ViewUpdate { clear: false, page }
}

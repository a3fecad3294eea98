use ratatui::layout::{Flex, Layout, Rect, Size};

/// Center a `size`-sized area within `buffer_area`, clipping if the buffer is
/// too small.
pub(crate) fn center_rect(buffer_area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [area] = Layout::vertical([size.height]).flex(Flex::Center).areas(area);
    area
}

/// Move selection cursor one item back, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    if selected == 0 || selected >= item_count {
        item_count - 1
    } else {
        selected - 1
    }
}

/// Move selection cursor one item forward, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

use super::*;

fn items(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn second_page_of_twelve_with_five_rows() {
    let all = items(12);
    assert_eq!(paginate(&all, 1, 5), &all[5..10]);
}

#[test]
fn last_page_is_clipped() {
    let all = items(12);
    assert_eq!(paginate(&all, 2, 5), &[10, 11]);
}

#[test]
fn out_of_range_pages_are_empty() {
    let all = items(12);
    assert!(paginate(&all, 3, 5).is_empty());
    assert!(paginate(&all, usize::MAX, 25).is_empty());
    assert!(paginate::<usize>(&[], 0, 5).is_empty());
    assert!(paginate(&all, 0, 0).is_empty());
    assert!(paginate(&all, 7, 0).is_empty());
}

#[test]
fn never_panics_across_index_and_size_grid() {
    for len in [0usize, 1, 4, 5, 6, 24, 25, 26] {
        let all = items(len);
        for page_size in [0usize, 1, 5, 10, 25] {
            for page_index in 0..8usize {
                let slice = paginate(&all, page_index, page_size);
                assert!(slice.len() <= page_size);
                if page_index * page_size >= len {
                    assert!(slice.is_empty());
                }
            }
        }
    }
}

#[test]
fn changing_page_size_resets_to_first_page() {
    for prior in [0usize, 1, 4, 99] {
        let state = PaginationState::new(PageSize::Five).with_page_index(prior);
        for size in PageSize::ALL {
            let next = state.with_page_size(size);
            assert_eq!(next.page_index, 0);
            assert_eq!(next.page_size, size);
        }
    }
}

#[test]
fn setting_page_index_keeps_size() {
    let state = PaginationState::new(PageSize::Ten).with_page_index(40);
    assert_eq!(state.page_size, PageSize::Ten);
    assert_eq!(state.page_index, 40);
    assert!(state.slice(&items(12)).is_empty());
}

#[test]
fn next_and_prev_stay_in_bounds() {
    let state = PaginationState::new(PageSize::Five);
    assert_eq!(state.prev_page().page_index, 0);

    let state = state.next_page(12).next_page(12);
    assert_eq!(state.page_index, 2);
    assert_eq!(state.next_page(12).page_index, 2);
    assert_eq!(state.prev_page().page_index, 1);

    assert_eq!(PaginationState::default().next_page(0).page_index, 0);
}

#[test]
fn page_count_rounds_up() {
    let state = PaginationState::new(PageSize::Five);
    assert_eq!(state.page_count(0), 0);
    assert_eq!(state.page_count(5), 1);
    assert_eq!(state.page_count(12), 3);
    assert_eq!(state.with_page_size(PageSize::TwentyFive).page_count(12), 1);
}

#[test]
fn range_label_matches_table_footer() {
    let state = PaginationState::new(PageSize::Five);
    assert_eq!(state.range_label(12), "1–5 of 12");
    assert_eq!(state.with_page_index(1).range_label(12), "6–10 of 12");
    assert_eq!(state.with_page_index(2).range_label(12), "11–12 of 12");
    assert_eq!(state.range_label(0), "0–0 of 0");
    assert_eq!(state.with_page_index(9).range_label(12), "0–0 of 12");
}

#[test]
fn page_size_parses_only_offered_options() {
    assert_eq!("5".parse::<PageSize>(), Ok(PageSize::Five));
    assert_eq!("10".parse::<PageSize>(), Ok(PageSize::Ten));
    assert_eq!(" 25 ".parse::<PageSize>(), Ok(PageSize::TwentyFive));
    assert!("7".parse::<PageSize>().is_err());
    assert!("ten".parse::<PageSize>().is_err());
    assert_eq!(PageSize::TwentyFive.to_string(), "25");
}

#[test]
fn page_size_cycles_through_options() {
    assert_eq!(PageSize::default(), PageSize::Five);
    assert_eq!(PageSize::Five.cycle(), PageSize::Ten);
    assert_eq!(PageSize::Ten.cycle(), PageSize::TwentyFive);
    assert_eq!(PageSize::TwentyFive.cycle(), PageSize::Five);
}

use super::*;

#[test]
fn display_src_falls_back_to_placeholder() {
    assert_eq!(display_src(""), PLACEHOLDER_IMAGE);
    assert_eq!(display_src("   "), PLACEHOLDER_IMAGE);
}

#[test]
fn display_src_passes_through_paths_and_data_urls() {
    assert_eq!(display_src("/floor-plan-2bhk.jpg"), "/floor-plan-2bhk.jpg");
    assert_eq!(display_src("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
}

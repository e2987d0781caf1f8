use ticket_mailer_server::ticket::Category;

#[test]
fn known_codes_parse() {
    for code in 1..=9u8 {
        let category = Category::from_code(code).expect("codes 1..=9 are valid");
        assert_eq!(category.code(), code);
    }
}

#[test]
fn unknown_codes_are_rejected() {
    assert!(Category::from_code(0).is_none());
    assert!(Category::from_code(10).is_none());
    assert!(Category::from_code(255).is_none());
}

#[test]
fn template_paths_follow_bucket_convention() {
    assert_eq!(Category::C1.template_path(), "ticketData/301-3.pdf");
    assert_eq!(Category::C7.template_path(), "ticketData/307-3.pdf");
}

#[test]
fn all_covers_every_category_once() {
    let mut codes: Vec<u8> = Category::ALL.into_iter().map(Category::code).collect();
    codes.sort_unstable();
    assert_eq!(codes, (1..=9).collect::<Vec<u8>>());
}

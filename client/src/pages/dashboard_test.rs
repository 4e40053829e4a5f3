use super::*;

#[test]
fn welcome_line_joins_label_and_name() {
    assert_eq!(welcome_line("Welcome", "Paritosh"), "Welcome, Paritosh");
    assert_eq!(welcome_line("स्वागत है", "Ramesh Gupta"), "स्वागत है, Ramesh Gupta");
}

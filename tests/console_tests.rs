use debug_print::call_site;
use debug_print::console::{format_call_site_block, CallSite};
use debug_print::function_name;
use debug_print::string_table::{self, KEY_SEPARATOR};

#[test]
fn test_call_site_block_layout() {
    let site = CallSite {
        file: "src/game.rs",
        line: 42,
        function: "game::update",
    };
    let block = format_call_site_block("something went wrong", site);

    let separator = string_table::get(KEY_SEPARATOR);
    assert!(block.starts_with(&separator));
    assert!(block.ends_with(&separator));

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[1], "file: src/game.rs");
    assert_eq!(lines[2], "line: 42");
    assert_eq!(lines[3], "function: game::update");
    assert_eq!(lines[4], "something went wrong");
}

#[test]
fn test_call_site_macro_captures_location() {
    let site = call_site!();
    assert!(site.file.ends_with("console_tests.rs"));
    assert!(site.line > 0);
    assert!(site.function.ends_with("test_call_site_macro_captures_location"));
}

#[test]
fn test_function_name_has_no_marker_suffix() {
    let name = function_name!();
    assert!(!name.contains("marker"));
    assert!(name.contains("console_tests"));
}

pub mod formatter;

pub use formatter::{
    format_card_detail, format_json, format_match_result, format_menu, should_use_colors,
    FormatOptions,
};

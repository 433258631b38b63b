mod layout;

pub use layout::{
    is_sell_list, render_section, CASE_STUDY_HEADING, HISTORICAL_BANNER, TIPS_HEADING,
};

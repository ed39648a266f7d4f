pub mod card_record;
pub mod card_report;
pub mod downloaded_image;
pub mod grade;
pub mod price_table;
pub mod search_result;

pub mod api_utils;
pub mod excel_importer;

pub mod parser;

pub use parser::read_excel_from_file;

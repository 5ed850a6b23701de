pub mod style_parser;

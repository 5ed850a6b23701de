pub mod i18n_ast;

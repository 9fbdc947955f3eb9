extern crate proc_macro;

use proc_macro::TokenStream;

/// Marks a struct as a model and registers the `#[dao(..)]` and
/// `#[column(..)]` field attributes.
///
/// The derive generates nothing; DAOs are generated ahead of time by the
/// `mongo-dao-gen` command. Malformed annotations are reported as compile
/// errors.
#[proc_macro_derive(Dao, attributes(dao, column))]
pub fn derive_dao(input: TokenStream) -> TokenStream {
    match mongo_dao_gen::check(input.into()) {
        Ok(()) => TokenStream::new(),
        Err(e) => e.to_compile_error().into(),
    }
}

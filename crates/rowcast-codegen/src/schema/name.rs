use heck::ToSnakeCase;

/// Table a model is stored in when it does not name one: the snake_case type
/// name with an `s` appended.
pub(super) fn default_table(ident: &syn::Ident) -> String {
    format!("{}s", ident.to_string().to_snake_case())
}

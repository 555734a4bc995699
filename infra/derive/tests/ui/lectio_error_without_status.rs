use lectio_derive::lectio_error;
use std::borrow::Cow;

#[lectio_error]
pub enum PlainError {
    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = PlainError::InvalidConfiguration { message: "no layers".into(), context: None };
    assert_eq!(err.to_string(), "Invalid configuration: no layers");
}

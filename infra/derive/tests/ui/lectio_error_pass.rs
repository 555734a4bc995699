use lectio_derive::lectio_error;
use std::borrow::Cow;

#[lectio_error]
pub enum DemoError {
    #[status(502)]
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[status(code)]
    #[error("Upstream error{}: {message}", format_context(.context))]
    Upstream { code: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::from("boom");
    assert_eq!(err.status_code(), 500);

    let io = DemoError::from(std::io::Error::other("reset"));
    assert_eq!(io.status_code(), 502);
}

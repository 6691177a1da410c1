mod db;

pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;

/// Error envelope returned by every failing endpoint. The `code` is the
/// integer exposed in the body and always matches the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    status: StatusCode,
    code: u16,
    message: &'static str,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: u16, message: &'static str) -> Error {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub fn internal<E: std::fmt::Debug>(error: E) -> Self {
        error!("internal error: {:?}", error);
        INTERNAL
    }

    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "success": false,
                "error": self.code(),
                "message": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        INTERNAL
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: Error = Error::new(StatusCode::$status, $code, $msg);
    };
}

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 500, "internal server error");
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, 400, "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    400,
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, 400, "invalid data");
const_error!(JSON_MISSING_FIELDS, UNPROCESSABLE_ENTITY, 422, "missing fields");
const_error!(QUESTION_NOT_INSERTED, UNPROCESSABLE_ENTITY, 422, "unprocessable");
const_error!(PAGE_NOT_FOUND, NOT_FOUND, 404, "page not found");
const_error!(QUESTION_NOT_FOUND, NOT_FOUND, 404, "question not found");
const_error!(CATEGORY_NOT_FOUND, NOT_FOUND, 404, "category not found");

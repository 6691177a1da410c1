#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!($res.status(), $error.status());

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["success"], serde_json::json!(false));
        assert_eq!(res_json["error"], $error.code());
        assert_eq!(res_json["message"], $error.message());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

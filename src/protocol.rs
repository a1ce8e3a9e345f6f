use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_response_carries_message() {
        let resp = SimpleResponse::err("No such room");
        assert!(!resp.success);
        assert_eq!(resp.err, "No such room");
    }

    #[test]
    fn ok_response_is_empty() {
        let resp = SimpleResponse::ok();
        assert!(resp.success);
        assert!(resp.err.is_empty());
    }
}

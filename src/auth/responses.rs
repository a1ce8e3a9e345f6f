use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
    // the client picks its dashboard from this
    pub role: String,
}

#[derive(Default, Serialize)]
pub struct ViewInfoResponse {
    pub success: bool,
    pub err: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

crate::impl_err_response! {
    SigninResponse,
    ViewInfoResponse,
}

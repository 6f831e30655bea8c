/// GET / -> fixed greeting, never behind authentication.
pub async fn hello_world() -> &'static str {
    "Hello, World!"
}

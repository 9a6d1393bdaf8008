use anyhow::Result;
use reqwest::Client;
use std::future::Future;

pub trait ClientExt {
    fn get_json<T>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<T>> + Send
    where
        T: serde::de::DeserializeOwned;

    fn post_form<T>(
        &self,
        url: &str,
        auth: (&str, &str),
        form: &[(&str, &str)],
    ) -> impl Future<Output = Result<T>> + Send
    where
        T: serde::de::DeserializeOwned;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientExt for Client {
    /// GET request `url` with `params` attached as the query string, and read
    /// the JSON body into `T`. Any non-success status aborts with the status.
    async fn get_json<T>(&self, url: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.get(url).query(params).send().await?;
        let data = response.error_for_status()?.json().await?;
        Ok(data)
    }

    /// POST `form` to `url` under HTTP basic auth, and read the JSON body
    /// into `T`. Any non-success status aborts with the status.
    async fn post_form<T>(&self, url: &str, auth: (&str, &str), form: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let (username, password) = auth;
        let response = self
            .post(url)
            .basic_auth(username, Some(password))
            .form(form)
            .send()
            .await?;
        let data = response.error_for_status()?.json().await?;
        Ok(data)
    }
}

pub mod client_ext;

pub mod prelude {
    pub use crate::client_ext::ClientExt;
    #[allow(unused_imports)]
    pub use reqwest::Client;

    pub fn build_client(user_agent: &str) -> anyhow::Result<Client> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()?;
        Ok(client)
    }
}

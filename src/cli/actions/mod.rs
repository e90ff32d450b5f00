pub mod server;

use crate::api::handlers::auth::DemoAccounts;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        frontend_base_url: String,
        demo: DemoAccounts,
    },
}

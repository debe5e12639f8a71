//! Configures the CAS gateway with an in-memory protocol stub and walks through
//! the computed server URLs plus an auto-login round-trip.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use parking_lot::Mutex;
// self
use social_gateway::sso::{CasConfig, CasGateway, CasProtocol, CasProtocolError, CasUrls};

#[derive(Default)]
struct InMemoryProtocol {
	authenticated: Mutex<bool>,
}
impl CasProtocol for InMemoryProtocol {
	fn initialize(&self, _: &CasConfig, urls: &CasUrls) -> Result<(), CasProtocolError> {
		println!("protocol initialized against {}", urls.base);

		Ok(())
	}

	fn force_authentication(&self) -> Result<(), CasProtocolError> {
		*self.authenticated.lock() = true;

		Ok(())
	}

	fn logout(&self) -> Result<(), CasProtocolError> {
		*self.authenticated.lock() = false;

		Ok(())
	}

	fn is_authenticated(&self) -> Result<bool, CasProtocolError> {
		Ok(*self.authenticated.lock())
	}

	fn check_authentication(&self) -> Result<bool, CasProtocolError> {
		Ok(*self.authenticated.lock())
	}

	fn user(&self) -> Result<String, CasProtocolError> {
		Ok("demo-user".to_owned())
	}
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let gateway = CasGateway::new();
	let config = CasConfig::new("sso.example.com", 8443, "https://app.example.com/")
		.with_ssl(false)
		.with_debugging(true);
	let urls = gateway.configure(config, Arc::new(InMemoryProtocol::default()))?;

	println!("login            {}", urls.login);
	println!("service validate {}", urls.service_validate);
	println!("proxy validate   {}", urls.proxy_validate);
	println!("logout           {}", urls.logout);

	gateway.auto_login()?;

	println!("logged in as {}", gateway.user()?);

	Ok(())
}

// self
use crate::{_prelude::*, provider::ProviderKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedQuery<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedQuery<F> = F;

/// Span builder for provider queries.
#[derive(Clone, Debug)]
pub struct QuerySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl QuerySpan {
	/// Creates a span tagged with the provider and endpoint.
	pub fn new(provider: ProviderKind, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("social_gateway.query", provider = provider.as_str(), endpoint);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedQuery<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Span builder for SSO gateway operations.
#[derive(Clone, Debug)]
pub struct SsoSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SsoSpan {
	/// Creates a span tagged with the SSO operation name.
	pub fn new(op: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("social_gateway.sso", op);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = op;

			Self {}
		}
	}

	/// Enters the span for the duration of a synchronous operation.
	pub fn entered(self) -> SsoSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SsoSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SsoSpanGuard {}
		}
	}
}

/// RAII guard returned by [`SsoSpan::entered`].
pub struct SsoSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SsoSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SsoSpanGuard(..)")
	}
}

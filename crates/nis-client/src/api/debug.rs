use crate::client::NisApi;
use crate::request::Call;
use crate::routes;

/// Node diagnostics.
pub struct Debug<'a, C> {
    client: &'a C,
}

impl<'a, C: NisApi> Debug<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::DEBUG_PREFIX
    }

    pub fn time_synchronization(&self) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::DEBUG_TIME_SYNCHRONIZATION))
    }

    pub fn connections_incoming(&self) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::DEBUG_CONNECTIONS_INCOMING))
    }

    pub fn connections_outgoing(&self) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::DEBUG_CONNECTIONS_OUTGOING))
    }

    pub fn timers(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::DEBUG_TIMERS))
    }
}

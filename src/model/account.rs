/// Broker-reported account state for one instrument, supplied by the caller
/// on every evaluation. The engine never fetches or mutates any of this.
#[derive(Debug, Clone)]
pub struct AccountView {
    /// Currently held quantity in contract units (signed).
    pub held_quantity: f64,
    /// Maximum leverage the broker allows on this instrument.
    pub leverage: f64,
    /// Margin still available on the account, in account currency.
    pub margin_remaining: f64,
    /// Contract multiplier (value of one point per contract).
    pub contract_multiplier: f64,
    /// Minimum tradable increment for this instrument.
    pub lot_size: f64,
    /// Conversion rate from instrument quote currency to account currency.
    pub fx_instrument_to_account: f64,
    /// Trading capital allocated to this instrument, in account currency.
    pub capital: f64,
}

impl AccountView {
    pub fn fx_account_to_instrument(&self) -> f64 {
        1.0 / self.fx_instrument_to_account
    }
}

//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, OhlcvQuery, TradingEndpoints};
use crate::environment::Environment;
use crate::error::{is_not_found, RestError, RestResult};
use crate::gateway::Gateway;
use crate::pages::Pages;
use crate::transport::{HttpTransport, Transport};
use chrono::{DateTime, Utc};
use crix_auth::Credentials;
use crix_types::{Account, Depth, NewOrder, Order, Resolution, Symbol, Ticker, Ticker24, Trade};
use std::cell::RefCell;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Default number of records requested per symbol
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Environment variable selecting the deployment
const ENVIRONMENT_ENV: &str = "CRIX_ENV";

/// Environment variable holding the public API token
const TOKEN_ENV: &str = "CRIX_API_TOKEN";

const DEFAULT_USER_AGENT: &str = concat!("crix-rest/", env!("CARGO_PKG_VERSION"));

/// CRIX.IO REST API client
///
/// Public endpoints work without credentials; `/user/*` endpoints need
/// them. The market list is cached after the first fetch and reused by
/// every multi-symbol call that was given no symbols.
///
/// The cache lives in a `RefCell`, so the client is not `Sync`. Share it
/// between threads behind a `Mutex` or build one client per thread.
///
/// # Example
///
/// ```no_run
/// use crix_rest::{CrixClient, Credentials};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CrixClient::new()?;
///     let markets = client.fetch_markets(false)?;
///     println!("{} markets", markets.len());
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CrixClient::with_credentials(creds)?;
///     for order in auth_client.fetch_open_orders(&["BTC_USDT"], 100)? {
///         println!("{:?}", order?);
///     }
///
///     Ok(())
/// }
/// ```
pub struct CrixClient {
    gateway: Gateway,
    environment: Environment,
    markets: RefCell<Option<Vec<Symbol>>>,
    cache_markets: bool,
}

impl CrixClient {
    /// Create a new client for the default environment without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport = HttpTransport::new(config.timeout, user_agent)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        let gateway = Gateway::new(config.environment.base_url(), transport, config.credentials);

        info!(
            environment = %config.environment,
            authenticated = gateway.has_credentials(),
            "Created CRIX REST client"
        );

        Self {
            gateway,
            environment: config.environment,
            markets: RefCell::new(None),
            cache_markets: config.cache_markets,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.gateway.has_credentials()
    }

    /// Environment the client talks to
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.gateway)
    }

    /// Get all symbols listed on the exchange
    ///
    /// Served from the cache unless it is empty or `force_refresh` is set.
    pub fn fetch_markets(&self, force_refresh: bool) -> RestResult<Vec<Symbol>> {
        if self.cache_markets && !force_refresh {
            if let Some(cached) = self.markets.borrow().as_ref() {
                if !cached.is_empty() {
                    debug!("Serving {} markets from cache", cached.len());
                    return Ok(cached.clone());
                }
            }
        }

        let symbols = self.market().symbols()?;
        if self.cache_markets {
            *self.markets.borrow_mut() = Some(symbols.clone());
        }
        Ok(symbols)
    }

    /// Re-fetch the market list and replace the cache
    pub fn refresh_markets(&self) -> RestResult<Vec<Symbol>> {
        self.fetch_markets(true)
    }

    /// Lowercase `base_quote` codes of all markets (e.g. "btc_usdt")
    pub fn fetch_currency_codes(&self) -> RestResult<Vec<String>> {
        Ok(self
            .fetch_markets(false)?
            .iter()
            .map(Symbol::currency_code)
            .collect())
    }

    /// Get orderbook depth for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Symbol name (e.g., "BTC_USDT")
    /// * `level_aggregation` - Aggregate levels by rounding (none if `None`)
    pub fn fetch_order_book(&self, symbol: &str, level_aggregation: Option<u32>) -> RestResult<Depth> {
        self.market().order_book(symbol, level_aggregation)
    }

    /// Get 24 hour tickers for all symbols
    pub fn fetch_ticker(&self) -> RestResult<Vec<Ticker24>> {
        self.market().tickers24()
    }

    /// Get OHLCV candles for a symbol in a time frame
    pub fn fetch_ohlcv(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        resolution: Resolution,
        limit: u32,
    ) -> RestResult<Vec<Ticker>> {
        let query = OhlcvQuery::new(symbol, start, end)
            .with_resolution(resolution)
            .with_limit(limit);
        self.market().ohlcv(&query)
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(&self.gateway))
    }

    /// Iterate over open orders of the given symbols
    ///
    /// An empty `symbols` slice means every market. One request is made per
    /// symbol, only when the iterator reaches it.
    pub fn fetch_open_orders(&self, symbols: &[&str], limit: u32) -> RestResult<Pages<'_, String, Order>> {
        let account = self.account()?;
        Ok(Pages::new(self.symbol_keys(symbols), move |symbol: &String| {
            account.open_orders(symbol, limit)
        }))
    }

    /// Iterate over completed and cancelled orders of the given symbols
    pub fn fetch_closed_orders(
        &self,
        symbols: &[&str],
        limit: u32,
    ) -> RestResult<Pages<'_, String, Order>> {
        let account = self.account()?;
        Ok(Pages::new(self.symbol_keys(symbols), move |symbol: &String| {
            account.closed_orders(symbol, limit)
        }))
    }

    /// Iterate over open and closed orders of the given symbols
    ///
    /// For each symbol the open page comes first, then the closed page.
    /// `limit` applies to each page.
    pub fn fetch_orders(
        &self,
        symbols: &[&str],
        limit: u32,
    ) -> RestResult<Pages<'_, (String, OrderListing), Order>> {
        let account = self.account()?;
        let resolve = self.symbol_keys(symbols);
        Ok(Pages::new(
            move || {
                Ok(resolve()?
                    .into_iter()
                    .flat_map(|symbol| {
                        [
                            (symbol.clone(), OrderListing::Open),
                            (symbol, OrderListing::Closed),
                        ]
                    })
                    .collect())
            },
            move |(symbol, listing): &(String, OrderListing)| match listing {
                OrderListing::Open => account.open_orders(symbol, limit),
                OrderListing::Closed => account.closed_orders(symbol, limit),
            },
        ))
    }

    /// Iterate over own trades of the given symbols
    pub fn fetch_my_trades(&self, symbols: &[&str], limit: u32) -> RestResult<Pages<'_, String, Trade>> {
        let account = self.account()?;
        Ok(Pages::new(self.symbol_keys(symbols), move |symbol: &String| {
            account.trades(symbol, limit)
        }))
    }

    /// Get all currency balances
    pub fn fetch_balance(&self) -> RestResult<Vec<Account>> {
        self.account()?.balances()
    }

    /// Get rate history for a currency
    ///
    /// # Arguments
    /// * `begin` - Earliest time of interest
    /// * `end` - Latest time of interest (must not be past server time)
    /// * `currency` - Upper case currency name (e.g., "BTC")
    pub fn fetch_history(
        &self,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        currency: &str,
    ) -> RestResult<Vec<Ticker>> {
        self.account()?.history(begin, end, currency)
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(TradingEndpoints::new(&self.gateway))
    }

    /// Place a new order
    pub fn create_order(&self, order: &NewOrder) -> RestResult<Order> {
        self.trading()?.create_order(order)
    }

    /// Cancel an order
    pub fn cancel_order(&self, order_id: u64, symbol: &str) -> RestResult<Order> {
        self.trading()?.cancel_order(order_id, symbol)
    }

    /// Get a single order, or `None` if the exchange does not know it
    pub fn fetch_order(&self, order_id: u64, symbol: &str) -> RestResult<Option<Order>> {
        match self.trading()?.order(order_id, symbol) {
            Ok(order) => Ok(Some(order)),
            Err(err) if is_not_found(&err) => {
                debug!("Order {} on {} not found", order_id, symbol);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Symbols to page over: the given ones, or every market on first pull
    fn symbol_keys(&self, symbols: &[&str]) -> impl FnOnce() -> RestResult<Vec<String>> + '_ {
        let given: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
        move || {
            if !given.is_empty() {
                return Ok(given);
            }
            Ok(self
                .fetch_markets(false)?
                .into_iter()
                .map(|symbol| symbol.name)
                .collect())
        }
    }
}

impl fmt::Debug for CrixClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrixClient")
            .field("environment", &self.environment)
            .field("gateway", &self.gateway)
            .field("cache_markets", &self.cache_markets)
            .finish()
    }
}

/// Which order list a page of [`CrixClient::fetch_orders`] comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderListing {
    Open,
    Closed,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment to talk to
    pub environment: Environment,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout; the HTTP client's default when `None`
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Keep the market list between calls
    pub cache_markets: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            credentials: None,
            timeout: None,
            user_agent: None,
            cache_markets: true,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment
    ///
    /// `CRIX_ENV` selects the deployment (default "mvp"). Credentials are
    /// loaded when `CRIX_API_TOKEN` is set, in which case `CRIX_API_SECRET`
    /// is required too.
    pub fn from_env() -> RestResult<Self> {
        let mut config = Self::new();
        if let Ok(name) = std::env::var(ENVIRONMENT_ENV) {
            config.environment = Environment::from_name(name.trim());
        }
        if std::env::var_os(TOKEN_ENV).is_some() {
            config.credentials = Some(Credentials::from_env()?);
        }
        Ok(config)
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: impl Into<Environment>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable or disable the market list cache
    pub fn with_market_cache(mut self, enabled: bool) -> Self {
        self.cache_markets = enabled;
        self
    }
}

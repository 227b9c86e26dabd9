//! In-memory marketplace backend for integration tests
//!
//! Implements the resource traits over shared mutable state and records
//! every call, so tests can assert both on outcomes and on which
//! requests were (or were not) issued.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::Value;
use shared::models::{
    Address, AddressCreate, CartSummary, CheckoutRequest, Exchange, ExchangeProposal,
    ExchangeStatus, Invoice, Product, ProductCreate, ProductStatus, ProductUpdate, Role, User,
};
use trueque_client::{
    AddressApi, CartApi, ClientError, ClientResult, ExchangeApi, ProductApi, Session,
};

#[derive(Default)]
struct MarketState {
    products: BTreeMap<i64, Product>,
    cart_ids: Vec<Value>,
    addresses: Vec<Address>,
    exchanges: Vec<Exchange>,
    raw_exchanges: Option<Value>,
    calls: Vec<String>,
    fail_clear_cart: bool,
    fail_checkout: bool,
    create_address_without_id: bool,
}

/// Cheap-clone handle over the shared backend state.
#[derive(Clone, Default)]
pub struct MockMarket {
    state: Arc<Mutex<MarketState>>,
}

impl MockMarket {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MarketState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: &str) {
        self.lock().calls.push(call.to_string());
    }

    // ========== Seeding ==========

    pub fn with_product(self, product: Product) -> Self {
        {
            let mut state = self.lock();
            let id = product.product_id.unwrap();
            state.products.insert(id, product);
        }
        self
    }

    /// Store a product record under an explicit key, regardless of the
    /// identity the record itself carries.
    pub fn insert_product_record(&self, id: i64, product: Product) {
        self.lock().products.insert(id, product);
    }

    pub fn with_cart_ids(self, ids: Vec<Value>) -> Self {
        self.lock().cart_ids = ids;
        self
    }

    pub fn with_address(self, address: Address) -> Self {
        self.lock().addresses.push(address);
        self
    }

    pub fn with_exchange(self, exchange: Exchange) -> Self {
        self.lock().exchanges.push(exchange);
        self
    }

    /// Serve the exchange listing from a raw JSON payload, exercising
    /// the same lenient ingestion path as the HTTP client.
    pub fn with_raw_exchanges(self, raw: Value) -> Self {
        self.lock().raw_exchanges = Some(raw);
        self
    }

    pub fn failing_clear_cart(self) -> Self {
        self.lock().fail_clear_cart = true;
        self
    }

    pub fn failing_checkout(self) -> Self {
        self.lock().fail_checkout = true;
        self
    }

    pub fn creating_addresses_without_id(self) -> Self {
        self.lock().create_address_without_id = true;
        self
    }

    // ========== Introspection ==========

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn stored_addresses(&self) -> Vec<Address> {
        self.lock().addresses.clone()
    }

    pub fn stored_cart_ids(&self) -> Vec<Value> {
        self.lock().cart_ids.clone()
    }

    fn summary(state: &MarketState, user_id: i64) -> CartSummary {
        let total: Decimal = state
            .cart_ids
            .iter()
            .filter_map(Value::as_i64)
            .filter_map(|id| state.products.get(&id))
            .map(|product| product.price)
            .sum();
        CartSummary {
            cart_id: Some(1),
            user_id: Some(user_id),
            product_ids: state.cart_ids.clone(),
            total_price: Some(total),
            cart_date: None,
        }
    }
}

#[async_trait]
impl CartApi for MockMarket {
    async fn cart(&self, user_id: i64) -> ClientResult<CartSummary> {
        self.record("GET /carts/user");
        let state = self.lock();
        Ok(Self::summary(&state, user_id))
    }

    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary> {
        self.record("POST /carts/user/products");
        let mut state = self.lock();
        state.cart_ids.push(Value::from(product_id));
        Ok(Self::summary(&state, user_id))
    }

    async fn remove_from_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary> {
        self.record("DELETE /carts/user/products");
        let mut state = self.lock();
        state
            .cart_ids
            .retain(|value| value.as_i64() != Some(product_id));
        Ok(Self::summary(&state, user_id))
    }

    async fn clear_cart(&self, _user_id: i64) -> ClientResult<()> {
        self.record("DELETE /carts/user/clear");
        let mut state = self.lock();
        if state.fail_clear_cart {
            return Err(ClientError::ServerFailure {
                status: 500,
                message: "clear failed".to_string(),
            });
        }
        state.cart_ids.clear();
        Ok(())
    }

    async fn checkout(&self, user_id: i64, request: &CheckoutRequest) -> ClientResult<Invoice> {
        self.record("POST /carts/user/checkout");
        let mut state = self.lock();
        if state.fail_checkout {
            return Err(ClientError::ServerFailure {
                status: 500,
                message: "checkout failed".to_string(),
            });
        }
        if !state
            .addresses
            .iter()
            .any(|address| address.address_id == Some(request.address_id))
        {
            return Err(ClientError::RequestRejected {
                status: 404,
                message: format!("address {} not found", request.address_id),
            });
        }

        let ids: Vec<i64> = state.cart_ids.iter().filter_map(Value::as_i64).collect();
        let total: Decimal = ids
            .iter()
            .filter_map(|id| state.products.get(id))
            .map(|product| product.price)
            .sum();
        for id in &ids {
            if let Some(product) = state.products.get_mut(id) {
                product.status = ProductStatus::Sold;
            }
        }

        Ok(Invoice {
            invoice_id: Some(1),
            user_id: Some(user_id),
            address_id: Some(request.address_id),
            total_amount: total,
            invoice_date: Some(Utc::now()),
            products: Vec::new(),
        })
    }
}

#[async_trait]
impl ProductApi for MockMarket {
    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.record("GET /products");
        Ok(self.lock().products.values().cloned().collect())
    }

    async fn product(&self, product_id: i64) -> ClientResult<Product> {
        self.record("GET /products/:id");
        self.lock()
            .products
            .get(&product_id)
            .cloned()
            .ok_or(ClientError::RequestRejected {
                status: 404,
                message: format!("product {product_id} not found"),
            })
    }

    async fn user_products(&self, user_id: i64) -> ClientResult<Vec<Product>> {
        self.record("GET /users/:id/products");
        Ok(self
            .lock()
            .products
            .values()
            .filter(|product| product.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn search_products(&self, keyword: &str) -> ClientResult<Vec<Product>> {
        self.record("GET /products/search");
        let keyword = keyword.to_lowercase();
        Ok(self
            .lock()
            .products
            .values()
            .filter(|product| {
                product.name.to_lowercase().contains(&keyword)
                    || product.description.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect())
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.record("POST /products");
        let mut state = self.lock();
        let id = state.products.keys().max().copied().unwrap_or(0) + 1;
        let product = Product {
            product_id: Some(id),
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            status: ProductStatus::Available,
            user_id: Some(payload.user_id),
            image: payload.image.clone(),
            size: payload.size.clone(),
            publication_date: Some(Utc::now()),
            category_id: payload.category_id,
        };
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i64,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.record("PUT /products/:id");
        let mut state = self.lock();
        let product = state
            .products
            .get_mut(&product_id)
            .ok_or(ClientError::RequestRejected {
                status: 404,
                message: format!("product {product_id} not found"),
            })?;
        if let Some(name) = &payload.name {
            product.name = name.clone();
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(status) = payload.status {
            product.status = status;
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        self.record("DELETE /products/:id");
        self.lock().products.remove(&product_id);
        Ok(())
    }
}

#[async_trait]
impl AddressApi for MockMarket {
    async fn addresses(&self) -> ClientResult<Vec<Address>> {
        self.record("GET /addresses");
        Ok(self.lock().addresses.clone())
    }

    async fn address(&self, address_id: i64) -> ClientResult<Address> {
        self.record("GET /addresses/:id");
        self.lock()
            .addresses
            .iter()
            .find(|address| address.address_id == Some(address_id))
            .cloned()
            .ok_or(ClientError::RequestRejected {
                status: 404,
                message: format!("address {address_id} not found"),
            })
    }

    async fn user_addresses(&self, user_id: i64) -> ClientResult<Vec<Address>> {
        self.record("GET /users/:id/addresses");
        Ok(self
            .lock()
            .addresses
            .iter()
            .filter(|address| address.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_address(
        &self,
        user_id: i64,
        payload: &AddressCreate,
    ) -> ClientResult<Address> {
        self.record("POST /addresses/user");
        let mut state = self.lock();
        let address_id = if state.create_address_without_id {
            None
        } else {
            Some(
                state
                    .addresses
                    .iter()
                    .filter_map(|address| address.address_id)
                    .max()
                    .unwrap_or(0)
                    + 1,
            )
        };
        let address = Address {
            address_id,
            street: payload.street.clone(),
            number: payload.number.clone(),
            city: payload.city.clone(),
            country: payload.country.clone(),
            postal_code: payload.postal_code.clone(),
            user_id: Some(user_id),
        };
        if address.address_id.is_some() {
            state.addresses.push(address.clone());
        }
        Ok(address)
    }

    async fn update_address(
        &self,
        address_id: i64,
        payload: &AddressCreate,
    ) -> ClientResult<Address> {
        self.record("PUT /addresses/:id");
        let mut state = self.lock();
        let address = state
            .addresses
            .iter_mut()
            .find(|address| address.address_id == Some(address_id))
            .ok_or(ClientError::RequestRejected {
                status: 404,
                message: format!("address {address_id} not found"),
            })?;
        address.street = payload.street.clone();
        address.number = payload.number.clone();
        address.city = payload.city.clone();
        address.country = payload.country.clone();
        address.postal_code = payload.postal_code.clone();
        Ok(address.clone())
    }

    async fn delete_address(&self, address_id: i64) -> ClientResult<()> {
        self.record("DELETE /addresses/:id");
        self.lock()
            .addresses
            .retain(|address| address.address_id != Some(address_id));
        Ok(())
    }
}

#[async_trait]
impl ExchangeApi for MockMarket {
    async fn user_exchanges(&self, user_id: i64) -> ClientResult<Vec<Exchange>> {
        self.record("GET /exchanges/user");
        let state = self.lock();
        let all = match &state.raw_exchanges {
            Some(raw) => Exchange::from_value_lenient(raw.clone()),
            None => state.exchanges.clone(),
        };
        Ok(all
            .into_iter()
            .filter(|exchange| exchange.touches_user(user_id))
            .collect())
    }

    async fn propose_exchange(&self, proposal: &ExchangeProposal) -> ClientResult<Exchange> {
        self.record("POST /exchanges");
        let mut state = self.lock();
        let id = state
            .exchanges
            .iter()
            .map(|exchange| exchange.exchange_id)
            .max()
            .unwrap_or(0)
            + 1;
        let products = [proposal.owner_product_id, proposal.requester_product_id]
            .iter()
            .filter_map(|id| state.products.get(id))
            .cloned()
            .collect();
        let exchange = Exchange {
            exchange_id: id,
            owner_id: proposal.owner_id,
            requester_id: proposal.requester_id,
            owner_product_id: Some(proposal.owner_product_id),
            requester_product_id: Some(proposal.requester_product_id),
            products,
            status: ExchangeStatus::Pending,
            exchange_date: Some(Utc::now()),
            completion_date: None,
        };
        state.exchanges.push(exchange.clone());
        Ok(exchange)
    }

    async fn accept_exchange(&self, exchange_id: i64) -> ClientResult<Exchange> {
        self.record("PUT /exchanges/:id/accept");
        self.transition(exchange_id, ExchangeStatus::Accepted)
    }

    async fn reject_exchange(&self, exchange_id: i64) -> ClientResult<Exchange> {
        self.record("PUT /exchanges/:id/reject");
        self.transition(exchange_id, ExchangeStatus::Rejected)
    }

    async fn cancel_exchange(&self, exchange_id: i64) -> ClientResult<()> {
        self.record("DELETE /exchanges/:id");
        self.lock()
            .exchanges
            .retain(|exchange| exchange.exchange_id != exchange_id);
        Ok(())
    }
}

impl MockMarket {
    fn transition(&self, exchange_id: i64, status: ExchangeStatus) -> ClientResult<Exchange> {
        let mut state = self.lock();
        let exchange = state
            .exchanges
            .iter_mut()
            .find(|exchange| exchange.exchange_id == exchange_id)
            .ok_or(ClientError::RequestRejected {
                status: 404,
                message: format!("exchange {exchange_id} not found"),
            })?;
        exchange.status = status;
        Ok(exchange.clone())
    }
}

// ========== Fixtures ==========

pub fn session_for(user_id: i64) -> Session {
    Session::authenticated(User {
        user_id,
        username: format!("user{user_id}"),
        email: format!("user{user_id}@example.com"),
        name: None,
        phone: None,
        role: Role::User,
        registration_date: None,
    })
}

pub fn product(product_id: i64, price: Decimal, owner_id: i64) -> Product {
    Product {
        product_id: Some(product_id),
        name: format!("product {product_id}"),
        description: String::new(),
        price,
        status: ProductStatus::Available,
        user_id: Some(owner_id),
        image: None,
        size: None,
        publication_date: None,
        category_id: None,
    }
}

pub fn address(address_id: i64, user_id: i64) -> Address {
    Address {
        address_id: Some(address_id),
        street: "Gran Via".to_string(),
        number: "12".to_string(),
        city: "Madrid".to_string(),
        country: "Spain".to_string(),
        postal_code: "28013".to_string(),
        user_id: Some(user_id),
    }
}

pub fn complete_address_fields() -> AddressCreate {
    AddressCreate {
        street: "Calle Mayor".to_string(),
        number: "3".to_string(),
        city: "Sevilla".to_string(),
        country: "Spain".to_string(),
        postal_code: "41001".to_string(),
    }
}

pub fn exchange_between(
    exchange_id: i64,
    owner_id: i64,
    requester_id: i64,
    status: ExchangeStatus,
) -> Exchange {
    Exchange {
        exchange_id,
        owner_id,
        requester_id,
        owner_product_id: Some(100),
        requester_product_id: Some(200),
        products: vec![
            product(100, Decimal::new(1000, 2), owner_id),
            product(200, Decimal::new(2000, 2), requester_id),
        ],
        status,
        exchange_date: None,
        completion_date: None,
    }
}

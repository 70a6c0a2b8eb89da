mod account;
mod auth;
mod avatar;
mod oauth;
mod passkey;
mod user;

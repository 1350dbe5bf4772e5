pub mod anthropic;
pub mod gateway_client;
pub mod kana;
pub mod lookup;
pub mod options;
pub mod translator;

pub mod banner;
pub use banner::{Banner, BannerPage};
pub mod contact;
pub use contact::{Contact, ContactType, IconType};
pub mod product;
pub use product::{Product, ProductType};
pub mod news;
pub use news::NewsArticle;
pub mod quote;
pub use quote::{QuoteRequest, QuoteStatus};

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{self, CatalogItem};
use crate::context::GenContext;
use crate::review_text::{Rating, synthesize_review};
use crate::ticket::{Resolution, TicketStatus, TicketType, synthesize_ticket};

pub const CURRENCY: &str = "USD";
pub const SKU_PREFIXES: &[&str] = &["PRD", "ITM", "SKU", "ELK", "CLT", "HGD", "BOK"];
/// Purchases fall within this many days before the context date.
pub const PURCHASE_WINDOW_DAYS: u64 = 365;

/// Every key a serialized record carries.
pub const FIELD_NAMES: [&str; 18] = [
    "reviewId",
    "sku",
    "productName",
    "productDescription",
    "price",
    "currency",
    "datePurchased",
    "userId",
    "customerName",
    "slug",
    "reviewDescription",
    "reviewRating",
    "supportTicketNumber",
    "supportTicketStatus",
    "supportTicketComment",
    "supportTicketType",
    "supportTicketResolution",
    "ticketDuration",
];

/// One review joined with its support ticket. Serialized field names are the
/// downstream ingestion contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub review_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub product_description: String,
    pub price: f64,
    pub currency: String,
    pub date_purchased: NaiveDate,
    pub user_id: String,
    pub customer_name: String,
    pub slug: String,
    pub review_description: String,
    pub review_rating: Rating,
    pub support_ticket_number: String,
    pub support_ticket_status: TicketStatus,
    pub support_ticket_comment: String,
    pub support_ticket_type: TicketType,
    pub support_ticket_resolution: Option<Resolution>,
    pub ticket_duration: u32,
}

impl Record {
    /// Catalog entry this record was drawn from, if the product is known.
    pub fn catalog_item(&self) -> Option<&'static CatalogItem> {
        catalog::find_item(&self.product_name)
    }
}

/// URL-safe identifier: lowercase, spaces to hyphens, `&` to `and`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// Uniform price in `[min, max]`, rounded to cents.
fn sample_price(item: &CatalogItem, ctx: &mut GenContext) -> f64 {
    let raw = ctx.rng.random_range(item.min_price..=item.max_price);
    ((raw * 100.0).round() / 100.0).clamp(item.min_price, item.max_price)
}

fn sample_sku(ctx: &mut GenContext) -> String {
    let prefix = SKU_PREFIXES[ctx.rng.random_range(0..SKU_PREFIXES.len())];
    format!("{prefix}-{}", ctx.rng.random_range(10_000..=99_999u32))
}

fn sample_purchase_date(ctx: &mut GenContext) -> NaiveDate {
    let days_ago = ctx.rng.random_range(0..=PURCHASE_WINDOW_DAYS);
    ctx.today - Days::new(days_ago)
}

/// Draw one complete record.
pub fn assemble_record(ctx: &mut GenContext) -> Record {
    let (_, item) = catalog::pick_category_and_item(&mut ctx.rng);
    let price = sample_price(item, ctx);
    let rating = Rating::sample(&mut ctx.rng);
    let date_purchased = sample_purchase_date(ctx);
    let customer_name: String = Name().fake_with_rng(&mut ctx.rng);
    let user_id = format!("user_{}", ctx.rng.random_range(10_000..=99_999u32));
    let ticket = synthesize_ticket(&mut ctx.rng);
    let review_id = uuid::Builder::from_random_bytes(ctx.rng.random()).into_uuid();
    let sku = sample_sku(ctx);
    let review_description = synthesize_review(rating, item.name, &mut ctx.rng);

    Record {
        review_id,
        sku,
        product_name: item.name.to_string(),
        product_description: item.description.to_string(),
        price,
        currency: CURRENCY.to_string(),
        date_purchased,
        user_id,
        customer_name,
        slug: slugify(item.name),
        review_description,
        review_rating: rating,
        support_ticket_number: ticket.number,
        support_ticket_status: ticket.status,
        support_ticket_comment: ticket.comment.to_string(),
        support_ticket_type: ticket.ticket_type,
        support_ticket_resolution: ticket.resolution,
        ticket_duration: ticket.duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(seed: u64) -> GenContext {
        GenContext::seeded(seed, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Smart Watch"), "smart-watch");
        assert_eq!(slugify("Home & Garden"), "home-and-garden");
        assert_eq!(slugify("Cotton T-Shirt"), "cotton-t-shirt");
        assert_eq!(
            slugify("Wireless Bluetooth Headphones"),
            "wireless-bluetooth-headphones"
        );
    }

    #[test]
    fn record_fields_within_domain() {
        let mut ctx = ctx(1);
        let earliest = ctx.today - Days::new(PURCHASE_WINDOW_DAYS);
        for _ in 0..1_000 {
            let r = assemble_record(&mut ctx);
            let item = r.catalog_item().expect("product from catalog");
            assert!(item.contains_price(r.price), "{} {}", r.product_name, r.price);
            assert_eq!((r.price * 100.0).round() / 100.0, r.price);
            assert_eq!(r.product_description, item.description);
            assert_eq!(r.slug, slugify(&r.product_name));
            assert_eq!(r.currency, "USD");
            assert!(r.date_purchased <= ctx.today && r.date_purchased >= earliest);
            assert_eq!(
                r.support_ticket_resolution.is_some(),
                r.support_ticket_status.is_terminal()
            );
            assert!(!r.review_description.contains('{'));
            assert!(!r.customer_name.trim().is_empty());
        }
    }

    #[test]
    fn identity_formats() {
        let mut ctx = ctx(2);
        for _ in 0..200 {
            let r = assemble_record(&mut ctx);
            let (prefix, digits) = r.sku.split_once('-').unwrap();
            assert!(SKU_PREFIXES.contains(&prefix));
            assert_eq!(digits.len(), 5);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));

            let uid = r.user_id.strip_prefix("user_").unwrap();
            assert_eq!(uid.len(), 5);
            assert_eq!(r.review_id.get_version_num(), 4);
        }
    }

    #[test]
    fn review_ids_are_unique() {
        let mut ctx = ctx(3);
        let ids: std::collections::HashSet<_> =
            (0..2_000).map(|_| assemble_record(&mut ctx).review_id).collect();
        assert_eq!(ids.len(), 2_000);
    }

    #[test]
    fn same_seed_same_record() {
        let a = assemble_record(&mut ctx(99));
        let b = assemble_record(&mut ctx(99));
        assert_eq!(a, b);
        let c = assemble_record(&mut ctx(100));
        assert_ne!(a.review_id, c.review_id);
    }

    #[test]
    fn json_shape() {
        let r = assemble_record(&mut ctx(4));
        let value = serde_json::to_value(&r).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), FIELD_NAMES.len());
        for key in FIELD_NAMES {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert!(obj["reviewRating"].is_u64());
        assert!(obj["ticketDuration"].is_u64());
        assert!(obj["price"].is_f64() || obj["price"].is_u64());
        let date = obj["datePurchased"].as_str().unwrap();
        assert_eq!(date.len(), 10);
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn open_ticket_serializes_null_resolution() {
        let mut ctx = ctx(5);
        let r = std::iter::repeat_with(|| assemble_record(&mut ctx))
            .find(|r| !r.support_ticket_status.is_terminal())
            .unwrap();
        let value = serde_json::to_value(&r).unwrap();
        assert!(value["supportTicketResolution"].is_null());
    }
}

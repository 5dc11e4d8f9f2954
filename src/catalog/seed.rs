use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Condition, Listing, Purpose};

/// Built-in marketplace listings, dated relative to `now`
pub fn mock_listings(now: DateTime<Utc>) -> Vec<Listing> {
    vec![
        Listing::new("1", "Vintage Wooden Chair", Category::Furniture, Condition::UsedGood, 25)
            .with_description("A classic wooden chair, perfect for your living room.")
            .with_location("Lagos")
            .with_purpose(Purpose::Donate)
            .with_views(132)
            .with_created_at(now - Duration::days(2)),
        Listing::new("2", "Electric Drill", Category::Tools, Condition::UsedLikeNew, 50)
            .with_description("Powerful electric drill, lightly used, includes bits.")
            .with_location("Abuja")
            .with_purpose(Purpose::Repair)
            .with_views(87)
            .with_created_at(now - Duration::days(5)),
        Listing::new("3", "Leather Backpack", Category::Accessories, Condition::New, 80)
            .with_description("Genuine leather, perfect condition, stylish and durable.")
            .with_location("Port Harcourt")
            .with_purpose(Purpose::Trade)
            .with_views(210)
            .with_created_at(now - Duration::days(1)),
        Listing::new("4", "Single Airpod (Left)", Category::Electronics, Condition::UsedGood, 10_000)
            .with_description("A single left Airpod in good condition. Compatible with Airpod 2nd gen.")
            .with_location("Lagos")
            .with_views(45)
            .with_created_at(now - Duration::hours(3)),
        Listing::new("5", "Nike Sneaker (Right)", Category::Shoes, Condition::UsedLikeNew, 15_000)
            .with_description("Only the right foot of Nike's Air Max 2022. Worn twice.")
            .with_location("Ibadan")
            .with_views(301)
            .with_created_at(now - Duration::days(7)),
        Listing::new("6", "TV Remote Without Batteries", Category::Electronics, Condition::UsedFair, 3_000)
            .with_description("Universal TV remote. Needs AA batteries.")
            .with_location("Abuja")
            .with_views(12)
            .with_created_at(now - Duration::days(10)),
        Listing::new("7", "Left Glove (Leather)", Category::Accessories, Condition::UsedGood, 2_500)
            .with_description("High-quality leather glove, left hand only.")
            .with_location("Port Harcourt")
            .with_purpose(Purpose::Trade)
            .with_views(64)
            .with_created_at(now - Duration::days(4)),
    ]
}

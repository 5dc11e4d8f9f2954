use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pair_market::forms::ListingDraft;
use pair_market::uploads::{upload_batch, ImageUploader};
use pair_market::{
    Catalog, Category, FilterForm, Listing, ListingFilter, ListingStatus, MarketError, UploadError,
};

struct EchoUploader;

#[async_trait]
impl ImageUploader for EchoUploader {
    async fn upload(&self, file: &Path) -> Result<String, UploadError> {
        Ok(format!("https://cdn.example/{}", file.display()))
    }

    fn endpoint(&self) -> &str {
        "echo://"
    }
}

fn scenario_catalog() -> Catalog {
    Catalog::from_listings(vec![
        Listing::new("1", "Vintage Wooden Chair", Category::Furniture, "Used - Good".parse().unwrap(), 25),
        Listing::new("2", "Electric Drill", Category::Tools, "Used - Like New".parse().unwrap(), 50),
        Listing::new("3", "Leather Backpack", Category::Accessories, "New".parse().unwrap(), 80),
    ])
    .unwrap()
}

fn search(catalog: &Catalog, form: FilterForm) -> Vec<String> {
    let filter = ListingFilter::try_from(form).unwrap();
    catalog
        .search(&filter)
        .iter()
        .map(|listing| listing.name.clone())
        .collect()
}

#[test]
fn marketplace_scenario_through_form_input() {
    let catalog = scenario_catalog();

    let tools = FilterForm {
        category: "Tools".to_string(),
        ..Default::default()
    };
    assert_eq!(search(&catalog, tools), vec!["Electric Drill"]);

    let leather = FilterForm {
        search: "leather".to_string(),
        ..Default::default()
    };
    assert_eq!(search(&catalog, leather), vec!["Leather Backpack"]);

    let cheap = FilterForm {
        max_price: Some(30),
        ..Default::default()
    };
    assert_eq!(search(&catalog, cheap), vec!["Vintage Wooden Chair"]);

    assert_eq!(
        search(&catalog, FilterForm::default()),
        vec!["Vintage Wooden Chair", "Electric Drill", "Leather Backpack"]
    );
}

#[tokio::test]
async fn publish_after_upload_makes_listing_searchable() {
    let mut catalog = Catalog::seeded();
    let draft = ListingDraft {
        name: "Right AirPod Pro".to_string(),
        description: "Right side AirPod Pro, second generation. Works perfectly.".to_string(),
        category: "Electronics & Gadgets".to_string(),
        price: "9,000".to_string(),
        location: "Lagos".to_string(),
        condition: "used-good".to_string(),
        purpose: "sell".to_string(),
        images: vec![PathBuf::from("front.jpg"), PathBuf::from("case.jpg")],
    };

    let validated = draft.validate().unwrap();
    let report = upload_batch(&EchoUploader, &validated.images).await;
    assert!(report.is_complete());

    let id = catalog.publish(validated, report.uploaded).unwrap().id.clone();

    let results = catalog.search(&ListingFilter::new().search("airpod pro").category(Category::Electronics));
    assert_eq!(results.ids(), vec![id.as_str()]);
    assert_eq!(results.items()[0].images.len(), 2);

    catalog.set_status(&id, ListingStatus::Sold).unwrap();
    assert_eq!(catalog.get(&id).unwrap().status, ListingStatus::Sold);

    catalog.remove(&id).unwrap();
    assert!(matches!(catalog.get(&id), Err(MarketError::ListingNotFound(_))));
    assert!(catalog
        .search(&ListingFilter::new().search("airpod pro"))
        .is_empty());
}

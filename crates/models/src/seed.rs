//! One-shot seeding: wipes and repopulates the `properties` and
//! `company_info` collections with the launch content. Never called by the
//! API layer; the `seed` binary drives it manually.

use chrono::Utc;

use crate::company::{self, CompanyInfo, CompanyStats, ContactChannels, FounderInfo};
use crate::db::Store;
use crate::errors::StoreError;
use crate::property::{self, ListingStatus, Property, DEFAULT_IMAGE_URL};

#[derive(Debug)]
pub struct SeedSummary {
    pub properties: u64,
    pub company_records: u64,
}

/// Delete-then-insert; running twice yields the same end state.
pub async fn run(store: &Store) -> Result<SeedSummary, StoreError> {
    property::replace_all(store, &property_fixtures()).await?;
    company::replace(store, company_fixture()).await?;
    Ok(SeedSummary {
        properties: property::count(store).await?,
        company_records: company::count(store).await?,
    })
}

fn listing(
    title: &str,
    location: &str,
    price: i64,
    property_type: &str,
    size: &str,
    bedrooms: i32,
    bathrooms: i32,
    features: [&str; 3],
    description: &str,
) -> Property {
    Property {
        id: None,
        title: title.into(),
        location: location.into(),
        price,
        property_type: property_type.into(),
        size: size.into(),
        bedrooms,
        bathrooms,
        features: features.iter().map(|f| f.to_string()).collect(),
        description: description.into(),
        image_url: DEFAULT_IMAGE_URL.into(),
        gallery: vec![DEFAULT_IMAGE_URL.into(); 3],
        status: ListingStatus::Active,
        created_at: Utc::now(),
    }
}

pub fn property_fixtures() -> Vec<Property> {
    vec![
        listing(
            "Atina Merkez Luxury Daire",
            "Kolonaki, Atina",
            280_000,
            "Daire",
            "120 m²",
            3,
            2,
            ["Şehir Manzarası", "Merkezi Konum", "Yüksek Kira Potansiyeli"],
            "Atina'nın en prestijli semti Kolonaki'de, metro ve alışveriş merkezlerine \
             yürüme mesafesinde luxury daire.",
        ),
        listing(
            "Santorini Villa Projesi",
            "Oia, Santorini",
            450_000,
            "Villa",
            "180 m²",
            4,
            3,
            ["Deniz Manzarası", "Turizm Potansiyeli", "Premium Lokasyon"],
            "Santorini'nin ünlü Oia kasabasında, Ege Denizi manzaralı villa. Yüksek \
             turizm geliri potansiyeli.",
        ),
        listing(
            "Selanik Modern Residans",
            "Selanik Merkez",
            250_000,
            "Daire",
            "95 m²",
            2,
            2,
            ["Yeni Proje", "Garantili Kira", "İnvestment Grade"],
            "Selanik'in gelişen bölgesinde, garantili kira geliri ile modern residans \
             projesi.",
        ),
        listing(
            "Mykonos Beach House",
            "Platys Gialos, Mykonos",
            380_000,
            "Villa",
            "150 m²",
            3,
            2,
            ["Plaj Erişimi", "Lux Tatil Evi", "Airbnb Uygun"],
            "Mykonos'un ünlü plajlarından Platys Gialos'a sadece 50 metre mesafede \
             beach house.",
        ),
        listing(
            "Korfu Evi",
            "Korfu",
            320_000,
            "Villa",
            "140 m²",
            3,
            2,
            ["İyon Denizi", "Romantik Konum", "Geleneksel Mimari"],
            "Korfu İyon Denizi üzerinde yer alan Korfu, Yunanistan'ın en güzel ve \
             romantik adalarından biridir. Korfu'da birçok farklı tipte satılık ev \
             bulabilirsiniz.",
        ),
        listing(
            "Krete Luxury Resort Daire",
            "Chania, Krete",
            275_000,
            "Resort Daire",
            "110 m²",
            2,
            2,
            ["Resort İçinde", "Havuz", "Spa Erişimi"],
            "Krete'nin en güzel sahil şeridi Chania'da, 5 yıldızlı resort içinde \
             luxury daire.",
        ),
    ]
}

pub fn company_fixture() -> CompanyInfo {
    CompanyInfo {
        id: None,
        founder: FounderInfo {
            name: "Ali İrfan Kaynak".into(),
            title: "Kurucu & Golden Visa Uzmanı".into(),
            experience: "5+ Yıl Gayrimenkul Sektörü deneyimi".into(),
            credentials: "Gayrimenkul Yatırım Danışmanı, AB Göçmenlik Uzmanı".into(),
            description: "İzmir merkezli boutique gayrimenkul danışmanlık firması Golden \
                          Citizen'in kurucusu Ali İrfan Kaynak, 5 yılı aşkın süredir \
                          Gayrimenkul Sektöründedir ve ayrıca Türk yatırımcılara Yunanistan \
                          Golden Visa sürecinde rehberlik etmektedir."
                .into(),
            achievements: vec![
                "Başarılı Golden Visa Başvuruları".into(),
                "100% başarı oranı".into(),
                "İzmir'in en güvenilir Golden Visa uzmanı".into(),
                "Şeffaf ve dürüst danışmanlık yaklaşımı".into(),
            ],
        },
        contact: ContactChannels {
            whatsapp: "+90 533 285 30 31".into(),
            email: "info@goldencitizen.com.tr".into(),
            address: "İzmir, Türkiye".into(),
            office_hours: "Pazartesi - Cuma: 09:00 - 18:00".into(),
        },
        stats: CompanyStats {
            successful_applications: 50,
            success_rate: 100,
            experience_years: 5,
            average_process_time: "3-6 ay".into(),
        },
        updated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_listings_all_active() {
        let fixtures = property_fixtures();
        assert_eq!(fixtures.len(), 6);
        assert!(fixtures.iter().all(|p| p.status == ListingStatus::Active));
        assert!(fixtures.iter().all(|p| p.id.is_none()));
        assert!(fixtures.iter().all(|p| p.features.len() == 3));
    }

    #[test]
    fn company_fixture_is_populated() {
        let info = company_fixture();
        assert_eq!(info.founder.achievements.len(), 4);
        assert_eq!(info.stats.successful_applications, 50);
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pricing conversion
//!
//! The wire payload states currency and VAT rate once at the top level;
//! every converted [`Price`] carries them so a price is self-describing.
//! Amounts stay exact decimal strings throughout.

use crate::domain::{
    FloatingIpPricing, ImagePricing, LocationRef, Price, Pricing, ServerBackupPricing,
    ServerTypeLocationPricing, ServerTypePricing, ServerTypeRef, TrafficPricing,
};
use crate::schema;

impl From<schema::Pricing> for Pricing {
    fn from(s: schema::Pricing) -> Self {
        let ctx = PriceContext {
            currency: s.currency,
            vat_rate: s.vat_rate,
        };

        Pricing {
            image: ImagePricing {
                per_gb_month: ctx.price(s.image.price_per_gb_month),
            },
            floating_ip: FloatingIpPricing {
                monthly: ctx.price(s.floating_ip.price_monthly),
            },
            traffic: TrafficPricing {
                per_tb: ctx.price(s.traffic.price_per_tb),
            },
            server_backup: ServerBackupPricing {
                percentage: s.server_backup.percentage,
            },
            server_types: s
                .server_types
                .into_iter()
                .map(|st| ServerTypePricing {
                    server_type: ServerTypeRef {
                        id: st.id,
                        name: st.name,
                    },
                    pricings: st.prices.into_iter().map(|p| ctx.location_price(p)).collect(),
                })
                .collect(),
        }
    }
}

/// Currency/VAT context injected into every nested price
pub(crate) struct PriceContext {
    pub currency: String,
    pub vat_rate: String,
}

impl PriceContext {
    pub(crate) fn price(&self, p: schema::Price) -> Price {
        Price {
            currency: self.currency.clone(),
            vat_rate: self.vat_rate.clone(),
            net: p.net,
            gross: p.gross,
        }
    }

    pub(crate) fn location_price(
        &self,
        p: schema::PricingServerTypePrice,
    ) -> ServerTypeLocationPricing {
        ServerTypeLocationPricing {
            location: LocationRef { name: p.location },
            hourly: self.price(p.price_hourly),
            monthly: self.price(p.price_monthly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn injects_currency_and_vat_into_every_price() {
        let wire: schema::Pricing = serde_json::from_str(
            r#"{
                "currency": "EUR",
                "vat_rate": "19.00",
                "image": {"price_per_gb_month": {"net": "1", "gross": "1.19"}},
                "floating_ip": {"price_monthly": {"net": "1", "gross": "1.19"}},
                "traffic": {"price_per_tb": {"net": "1", "gross": "1.19"}},
                "server_backup": {"percentage": "20"},
                "server_types": [
                    {
                        "id": 4,
                        "name": "CX11",
                        "prices": [
                            {
                                "location": "fsn1",
                                "price_hourly": {"net": "1", "gross": "1.19"},
                                "price_monthly": {"net": "1", "gross": "1.19"}
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let pricing = Pricing::from(wire);

        let per_gb = &pricing.image.per_gb_month;
        assert_eq!(per_gb.currency, "EUR");
        assert_eq!(per_gb.vat_rate, "19.00");
        assert_eq!(per_gb.net, "1");
        assert_eq!(per_gb.gross, "1.19");

        assert_eq!(pricing.floating_ip.monthly.currency, "EUR");
        assert_eq!(pricing.traffic.per_tb.vat_rate, "19.00");
        assert_eq!(pricing.server_backup.percentage, "20");

        assert_eq!(pricing.server_types.len(), 1);
        let st = &pricing.server_types[0];
        assert_eq!(st.server_type.id, 4);
        assert_eq!(st.server_type.name, "CX11");
        assert_eq!(st.pricings.len(), 1);
        assert_eq!(st.pricings[0].location.name, "fsn1");
        assert_eq!(st.pricings[0].hourly.currency, "EUR");
        assert_eq!(st.pricings[0].hourly.net, "1");
        assert_eq!(st.pricings[0].monthly.gross, "1.19");
    }

    #[test]
    fn amounts_stay_verbatim_decimal_strings() {
        let wire: schema::Pricing = serde_json::from_str(
            r#"{
                "currency": "EUR",
                "vat_rate": "19.00",
                "image": {"price_per_gb_month": {"net": "0.0100000000", "gross": "0.0119000000"}}
            }"#,
        )
        .unwrap();

        let pricing = Pricing::from(wire);
        assert_eq!(pricing.image.per_gb_month.net, "0.0100000000");
        assert_eq!(pricing.image.per_gb_month.gross, "0.0119000000");
    }
}

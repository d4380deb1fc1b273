//! Test fixtures

use super::builders::*;
use archsense_core::{ApplicationService, ExtractedFacts, Provenance};

/// Order / customer / billing model covering every classification path.
///
/// Expected outcome with the conventional preset:
/// - `Order`: REPOSITORY_MATCH (weak marker + `OrderRepository`)
/// - `Customer`: EXPLICIT_MARKER
/// - `Invoice`: NAMESPACE_CONVENTION (`com.shop.aggregates.billing`)
/// - `Product`: stays ENTITY, weak signal ignored
/// - `Address`: shared by the Order and Customer clusters
pub fn fixture_shop_facts() -> ExtractedFacts {
    FactsBuilder::new()
        .with_types([
            marked(entity("com.shop.order.Order"), WEAK_MARKER)
                .with_identity("id", named("com.shop.order.OrderId"))
                .with_property("items", list_of("com.shop.order.OrderItem"))
                .with_property("customerId", named("com.shop.customer.CustomerId"))
                .with_property("shippingAddress", named("com.shop.shared.Address"))
                .with_provenance(Provenance::new("src/main/java/com/shop/order/Order.java", 12)),
            entity("com.shop.order.OrderItem")
                .with_property("order", named("com.shop.order.Order"))
                .with_property("productId", named("com.shop.catalog.ProductId"))
                .with_property("quantity", named("int")),
            identifier("com.shop.order.OrderId"),
            marked(entity("com.shop.customer.Customer"), STRONG_MARKER)
                .with_identity("id", named("com.shop.customer.CustomerId"))
                .with_property("address", named("com.shop.shared.Address")),
            identifier("com.shop.customer.CustomerId"),
            value_object("com.shop.shared.Address")
                .with_property("street", named("java.lang.String"))
                .with_property("city", named("java.lang.String")),
            entity("com.shop.aggregates.billing.Invoice")
                .with_property("orderIds", set_of("com.shop.order.OrderId"))
                .with_provenance(Provenance::new("Invoice.java", 8)),
            marked(entity("com.shop.catalog.Product"), WEAK_MARKER)
                .with_provenance(Provenance::new("Product.java", 5)),
        ])
        .with_port("com.shop.application.CreateOrderUseCase")
        .with_port("com.shop.domain.ports.CustomerRepository")
        .with_port("com.shop.domain.ports.OrderRepository")
        .with_service(
            ApplicationService::new("com.shop.application.OrderService")
                .implementing("com.shop.application.CreateOrderUseCase")
                .requiring("com.shop.domain.ports.OrderRepository"),
        )
        .build()
}

/// `n` independent entities; every third one sits in an aggregate package
pub fn fixture_n_entities(n: usize) -> ExtractedFacts {
    FactsBuilder::new()
        .with_types((0..n).map(|i| {
            let namespace = if i % 3 == 0 {
                "com.bulk.aggregates"
            } else {
                "com.bulk.model"
            };
            let ty = entity(&format!("{namespace}.Entity{i}"))
                .with_property("next", named(&format!("com.bulk.model.Entity{}", i + 1)));
            if i % 5 == 0 {
                marked(ty, WEAK_MARKER)
            } else {
                ty
            }
        }))
        .build()
}

/// Minimal JSON facts document as produced by an extractor
pub fn fixture_facts_json() -> &'static str {
    r#"{
        "types": [
            {
                "qualified_name": "com.acme.sales.Order",
                "kind": "ENTITY",
                "attributes": [{ "name": "jakarta.persistence.Entity" }],
                "identity": {
                    "field_name": "id",
                    "type_ref": { "qualified_name": "com.acme.sales.OrderId" }
                },
                "properties": [
                    {
                        "name": "id",
                        "type_ref": { "qualified_name": "com.acme.sales.OrderId" },
                        "identity": true,
                        "declaring_type": "com.acme.sales.Order"
                    },
                    {
                        "name": "lines",
                        "type_ref": {
                            "qualified_name": "java.util.List",
                            "type_arguments": [{ "qualified_name": "com.acme.sales.OrderLine" }]
                        },
                        "declaring_type": "com.acme.sales.Order"
                    }
                ]
            },
            {
                "qualified_name": "com.acme.sales.OrderLine",
                "kind": "ENTITY"
            }
        ],
        "ports": [
            { "qualified_name": "com.acme.sales.spi.OrderRepository" },
            {
                "qualified_name": "com.acme.sales.PlaceOrder",
                "declared_direction": "INBOUND"
            }
        ],
        "services": [
            {
                "qualified_name": "com.acme.sales.PlaceOrderService",
                "implemented_ports": ["com.acme.sales.PlaceOrder"]
            }
        ]
    }"#
}

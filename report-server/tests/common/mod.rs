#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use report_server::reports::ReportSettings;
use report_server::utils::FixedClock;
use report_server::{DataSource, ReportService, Snapshot, StaticSource};
use shared::models::{RawOrder, RawOrderLine, RawProduct};

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn order(id: &str, date: &str, total: &str, status: &str, method: &str) -> RawOrder {
    RawOrder {
        id: id.into(),
        date: date.into(),
        total: total.into(),
        status: status.into(),
        payment_method: method.into(),
        customer_id: String::new(),
    }
}

pub fn line(id: &str, order: &str, product: &str, qty: &str, amount: &str) -> RawOrderLine {
    RawOrderLine {
        id: id.into(),
        order_id: order.into(),
        product_id: product.into(),
        quantity: qty.into(),
        amount: amount.into(),
    }
}

pub fn product(id: &str, name: &str, category: &str) -> RawProduct {
    RawProduct {
        id: id.into(),
        name: name.into(),
        category: category.into(),
    }
}

/// March 2024 plus a February baseline
pub fn shop() -> Snapshot {
    let mut cust = order("F", "03/12/2024 08:30:00", "45000", "Paid", "Card");
    cust.customer_id = "C1".into();

    Snapshot {
        orders: vec![
            order("A", "03/05/2024 10:00:00", "100000", "Paid", "Cash"),
            order("B", "03/06/2024 11:00:00", "200000", "Pending", "Card"),
            order("C", "03/10/2024 19:30:00", "90000", "Paid", "Card"),
            cust,
            order("D", "02/12/2024 12:00:00", "50000", "Paid", "Card"),
            order("E", "02/20/2024 13:00:00", "30000", "Paid", "Cash"),
        ],
        lines: vec![
            line("L1", "A", "P1", "2", "80000"),
            line("L2", "A", "P2", "1", "20000"),
            line("L3", "C", "P2", "3", "60000"),
            line("L4", "C", "P3", "1", "30000"),
            line("L5", "D", "P1", "1", "50000"),
            line("L6", "E", "P2", "1", "30000"),
            line("L7", "F", "P3", "1", "45000"),
        ],
        products: vec![
            product("P1", "Pho", "Noodles"),
            product("P2", "Iced Tea", "Drinks"),
            product("P3", "Spring Roll", "Starters"),
        ],
    }
}

pub fn service_with(source: Arc<dyn DataSource>) -> ReportService {
    ReportService::new(source, Arc::new(FixedClock(now())), ReportSettings::default())
}

pub fn service(snapshot: Snapshot) -> ReportService {
    service_with(Arc::new(StaticSource::new(snapshot)))
}

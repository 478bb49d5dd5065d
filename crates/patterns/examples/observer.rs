use micro_patterns::observer::{Blogger, NewsAgency, NewsResource, Observable, Reporter};
use std::sync::Arc;

fn main() {
    micro_patterns::init_tracing().expect("setting default subscriber failed");

    let mut apple_company = NewsResource::new();

    apple_company.add(Arc::new(NewsAgency));
    apple_company.set_value(Some(3));

    apple_company.add(Arc::new(Reporter));
    apple_company.add(Arc::new(Blogger));

    apple_company.set_value(Some(2));
    apple_company.set_value(Some(5));

    apple_company.remove(&Reporter);
    apple_company.set_value(Some(1));

    println!("{apple_company:?}");
}

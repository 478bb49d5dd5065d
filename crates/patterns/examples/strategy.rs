use micro_patterns::strategy::{Filter, HighContrastFilter, Image, SepiaFilter};

fn main() {
    micro_patterns::init_tracing().expect("setting default subscriber failed");

    let mut filter = Filter::new();
    let image = Image::filled(4, 4, [120, 80, 200]).expect("4x4 image fits in memory");

    filter.set_strategy(HighContrastFilter::default());
    let contrasted = filter.apply(image.clone());
    println!("{filter:?}: {:?}", contrasted.pixels()[0]);

    filter.set_strategy(SepiaFilter);
    let sepia = filter.apply(image);
    println!("{filter:?}: {:?}", sepia.pixels()[0]);
}

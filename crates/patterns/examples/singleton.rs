use micro_patterns::singleton::Singleton;

fn main() {
    micro_patterns::init_tracing().expect("setting default subscriber failed");

    let object = Singleton::shared();
    let second_object = Singleton::shared();

    object.set_value(1000);
    second_object.set_value(2000);

    object.change_value();
    second_object.change_value();

    println!("same instance: {}", std::ptr::eq(object, second_object));

    object.set_value(200);
    println!("value = {}", second_object.change_value());
}

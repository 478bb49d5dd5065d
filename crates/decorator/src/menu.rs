//! The items served by the demonstration pages.

use crate::decorated::Topping;
use crate::item::BaseItem;

pub const ESPRESSO: BaseItem = BaseItem::from_static(10.0, "Espresso");
pub const ICE_CREAM: BaseItem = BaseItem::from_static(20.0, "Ice Cream");

pub const MILK: Topping = Topping::from_static(5.0, ", Milk");
pub const WHIP: Topping = Topping::from_static(7.0, ", Whip");
pub const CHOCOLATE: Topping = Topping::from_static(10.0, ", Chocolate");
pub const VANILA: Topping = Topping::from_static(10.0, ", Vanila");

#[inline]
pub fn espresso() -> BaseItem {
    ESPRESSO
}

#[inline]
pub fn ice_cream() -> BaseItem {
    ICE_CREAM
}

#[inline]
pub fn milk() -> Topping {
    MILK
}

#[inline]
pub fn whip() -> Topping {
    WHIP
}

#[inline]
pub fn chocolate() -> Topping {
    CHOCOLATE
}

#[inline]
pub fn vanila() -> Topping {
    VANILA
}

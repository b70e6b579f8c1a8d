//! Cart lines and cart subtotal

use crate::simple_types::{Amount, Price, Quantity, String50, ValidationError};

/// One product in the cart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    product_name: String50,
    unit_price: Price,
    quantity: Quantity,
}

impl CartLine {
    /// Creates a cart line
    #[must_use]
    pub const fn new(product_name: String50, unit_price: Price, quantity: Quantity) -> Self {
        Self {
            product_name,
            unit_price,
            quantity,
        }
    }

    /// Product display name
    #[must_use]
    pub const fn product_name(&self) -> &String50 {
        &self.product_name
    }

    /// Price of one unit
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Number of units
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the product leaves the `Amount` range.
    pub fn line_total(&self) -> Result<Amount, ValidationError> {
        self.unit_price.multiply(self.quantity)
    }
}

/// Cart contents at checkout time
///
/// # Examples
///
/// ```
/// use storefront_checkout::checkout::{Cart, CartLine};
/// use storefront_checkout::simple_types::{Price, Quantity, String50};
/// use rust_decimal::Decimal;
///
/// let cart = Cart::new(vec![
///     CartLine::new(
///         String50::create("ProductName", "Argan oil 100ml").unwrap(),
///         Price::create(Decimal::from(120)).unwrap(),
///         Quantity::create(2).unwrap(),
///     ),
///     CartLine::new(
///         String50::create("ProductName", "Black soap").unwrap(),
///         Price::create(Decimal::new(4_550, 2)).unwrap(),
///         Quantity::create(1).unwrap(),
///     ),
/// ]);
///
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.subtotal().unwrap().value(), Decimal::new(28_550, 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a cart from its lines
    #[must_use]
    pub const fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Cart lines in insertion order
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns `true` if the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity.value()).sum()
    }

    /// Sum of all line totals
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a line total or the sum leaves the
    /// `Amount` range.
    pub fn subtotal(&self) -> Result<Amount, ValidationError> {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .try_fold(Amount::ZERO, |accumulator, line_total| {
                accumulator.checked_add(line_total?)
            })
    }
}

//! Line-oriented shopping loop.
//!
//! Reads shopper input from any [`BufRead`] and writes prompts and results to
//! any [`Write`], so the same loop serves the terminal and scripted tests.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::entities::ProductType;
use crate::errors::ServiceError;
use crate::models::ProductSnapshot;
use crate::services::AppServices;

const QUIT_WORD: &str = "END";

/// An entry of the category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Category(ProductType),
    Done,
}

impl MenuChoice {
    /// Parses the menu number typed by the shopper.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Category(ProductType::Chair)),
            "2" => Some(Self::Category(ProductType::Bed)),
            "3" => Some(Self::Category(ProductType::Bookshelf)),
            "4" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Why a quantity entry was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    NotANumber,
    NotPositive,
    ExceedsStock(i32),
}

/// Checks a typed quantity against the stock shown to the shopper.
pub fn parse_quantity(input: &str, stock_level: i32) -> Result<i32, QuantityError> {
    let quantity: i32 = input.parse().map_err(|_| QuantityError::NotANumber)?;
    if quantity <= 0 {
        Err(QuantityError::NotPositive)
    } else if quantity > stock_level {
        Err(QuantityError::ExceedsStock(stock_level))
    } else {
        Ok(quantity)
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive session serving shoppers one after another.
pub struct ShopSession<R, W> {
    services: AppServices,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ShopSession<R, W> {
    pub fn new(services: AppServices, input: R, output: W) -> Self {
        Self {
            services,
            input,
            output,
        }
    }

    /// Hands back the output sink, e.g. to inspect a scripted run.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until a shopper types `END` or the input is exhausted.
    ///
    /// Rejected cart additions are reported and the shopper is re-prompted;
    /// only store and IO failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), ServiceError> {
        loop {
            let name = match self.prompt("Enter user name (or 'END' to quit): ")? {
                Some(name) => name,
                None => break,
            };
            if name.eq_ignore_ascii_case(QUIT_WORD) {
                break;
            }
            if name.is_empty() {
                continue;
            }

            info!(cart_id = %name, "Shopper started");
            if let Flow::Quit = self.shop(&name).await? {
                break;
            }
            let listing = self.services.listing.list_cart_contents(&name).await?;
            write!(self.output, "{}", listing)?;
        }
        self.output.flush()?;
        Ok(())
    }

    async fn shop(&mut self, cart_id: &str) -> Result<Flow, ServiceError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Select category to add to cart:")?;
            writeln!(self.output, "1. Chair")?;
            writeln!(self.output, "2. Bed")?;
            writeln!(self.output, "3. Bookshelf")?;
            writeln!(self.output, "4. DONE")?;
            let choice = match self.prompt("Enter choice (1-4): ")? {
                Some(choice) => choice,
                None => return Ok(Flow::Quit),
            };

            let product_type = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Done) => return Ok(Flow::Continue),
                Some(MenuChoice::Category(product_type)) => product_type,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if let Flow::Quit = self.add_from_category(cart_id, product_type).await? {
                return Ok(Flow::Quit);
            }
        }
    }

    async fn add_from_category(
        &mut self,
        cart_id: &str,
        product_type: ProductType,
    ) -> Result<Flow, ServiceError> {
        let page = self.services.catalog.list_products(product_type).await?;
        write!(self.output, "{}", page)?;

        let prompt = format!("Enter model number for {}: ", product_type);
        let product: ProductSnapshot = loop {
            let model_no = match self.prompt(&prompt)? {
                Some(model_no) => model_no,
                None => return Ok(Flow::Quit),
            };
            match page.get(&model_no) {
                Some(product) => break product.clone(),
                None => writeln!(self.output, "Invalid model number. Please try again.")?,
            }
        };

        let quantity = loop {
            let raw = match self.prompt("Enter quantity: ")? {
                Some(raw) => raw,
                None => return Ok(Flow::Quit),
            };
            match parse_quantity(&raw, product.stock_level) {
                Ok(quantity) => break quantity,
                Err(QuantityError::NotANumber) => {
                    writeln!(self.output, "Invalid quantity. Please enter a number.")?
                }
                Err(QuantityError::NotPositive) => {
                    writeln!(self.output, "Quantity must be a positive integer.")?
                }
                Err(QuantityError::ExceedsStock(available)) => {
                    writeln!(self.output, "Insufficient stock. Available: {}", available)?
                }
            }
        };

        match self
            .services
            .carts
            .add_item(cart_id, product_type, &product.model_no, quantity)
            .await
        {
            Ok(_) => writeln!(
                self.output,
                "Added {} x {} {} to cart.",
                quantity, product_type, product.model_no
            )?,
            Err(err) if err.is_recoverable() => writeln!(self.output, "Error: {}", err)?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    /// Writes a prompt and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ServiceError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(MenuChoice::Category(ProductType::Chair)))]
    #[case("2", Some(MenuChoice::Category(ProductType::Bed)))]
    #[case("3", Some(MenuChoice::Category(ProductType::Bookshelf)))]
    #[case("4", Some(MenuChoice::Done))]
    #[case("5", None)]
    #[case("Chair", None)]
    #[case("", None)]
    fn menu_choices(#[case] input: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[rstest]
    #[case("3", 20, Ok(3))]
    #[case("20", 20, Ok(20))]
    #[case("21", 20, Err(QuantityError::ExceedsStock(20)))]
    #[case("0", 20, Err(QuantityError::NotPositive))]
    #[case("-2", 20, Err(QuantityError::NotPositive))]
    #[case("two", 20, Err(QuantityError::NotANumber))]
    #[case("2.5", 20, Err(QuantityError::NotANumber))]
    fn quantity_entry(
        #[case] input: &str,
        #[case] stock: i32,
        #[case] expected: Result<i32, QuantityError>,
    ) {
        assert_eq!(parse_quantity(input, stock), expected);
    }
}

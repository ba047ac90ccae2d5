/// Two-way channel to the selection value owned by the host application.
///
/// The picker keeps no private copy of the selection: it reads the current
/// value to highlight the active cell and writes through on pick or cancel,
/// so every write is immediately observable to the owner.
pub trait SelectionBinding {
    fn get(&self) -> String;
    fn set(&mut self, symbol: String);
}

impl SelectionBinding for String {
    fn get(&self) -> String {
        self.clone()
    }

    fn set(&mut self, symbol: String) {
        *self = symbol;
    }
}

/// Adapter for hosts that expose their selection through accessors instead
/// of a plain `String` field.
pub struct FnBinding<G, S>
where
    G: Fn() -> String,
    S: FnMut(String),
{
    get: G,
    set: S,
}

impl<G, S> FnBinding<G, S>
where
    G: Fn() -> String,
    S: FnMut(String),
{
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> SelectionBinding for FnBinding<G, S>
where
    G: Fn() -> String,
    S: FnMut(String),
{
    fn get(&self) -> String {
        (self.get)()
    }

    fn set(&mut self, symbol: String) {
        (self.set)(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn string_binding_reads_and_writes_in_place() {
        let mut value = String::from("star");
        assert_eq!(SelectionBinding::get(&value), "star");
        value.set("star.fill".to_owned());
        assert_eq!(value, "star.fill");
    }

    #[test]
    fn fn_binding_routes_through_the_accessors() {
        let store = RefCell::new(String::from("heart"));
        let mut binding = FnBinding::new(
            || store.borrow().clone(),
            |symbol| *store.borrow_mut() = symbol,
        );
        assert_eq!(binding.get(), "heart");
        binding.set("bolt".to_owned());
        assert_eq!(*store.borrow(), "bolt");
    }
}

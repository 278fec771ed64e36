//! Typed indices for depots, orders and the two vehicle pools.
//!
//! Every id is the position of its record in the owning `Vec` of
//! `FleetState`, so ids are dense and handed out only by `FleetBuilder` and
//! `FleetState::add_order`.  There is no "unset" id: absence is an `Option`.

use std::fmt;

/// Declare an index newtype over an unsigned integer.
///
/// `$label` is the lower-case noun used by `Display` (`depot 2`,
/// `order 17`), which is what error messages and log events print.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position of the record in its pool.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        /// Fails when the pool has outgrown the id's integer width.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a depot.  Depots are few; `u16` is plenty.
    pub struct DepotId(u16) => "depot";
}

typed_id! {
    /// Index of an order in creation order.
    pub struct OrderId(u32) => "order";
}

typed_id! {
    /// Index of a depot-owned vehicle in the global local-vehicle pool.
    pub struct LocalVehicleId(u32) => "local vehicle";
}

typed_id! {
    /// Index of a vehicle in the shared pool.
    pub struct SharedVehicleId(u32) => "shared vehicle";
}

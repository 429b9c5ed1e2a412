/// Whether a value's provider travels with it when the value is assigned or swapped.
///
/// Mirrors the three per-provider flags containers consult on assignment. A flag
/// set to `false` means the assigned-to value keeps its own provider and only
/// the content moves across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Propagation {
	/// The source provider is adopted on copy assignment.
	pub on_copy_assign: bool,
	/// The source provider is adopted on move assignment.
	pub on_move_assign: bool,
	/// Providers are exchanged on swap.
	pub on_swap: bool,
}

impl Propagation {
	/// Providers never travel; the target keeps its own.
	pub const NEVER: Self = Self {
		on_copy_assign: false,
		on_move_assign: false,
		on_swap: false,
	};

	/// Providers always travel with the content.
	pub const ALWAYS: Self = Self {
		on_copy_assign: true,
		on_move_assign: true,
		on_swap: true,
	};

	/// Returns true if all three flags agree.
	///
	/// Swap-based assignment assumes consistent flags: a provider that travels on
	/// assignment but not on swap cannot be assigned through a swap.
	pub const fn is_consistent(self) -> bool {
		self.on_copy_assign == self.on_move_assign && self.on_move_assign == self.on_swap
	}
}

/// How a provider is represented in the values that carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Erasure {
	/// The value is generic over the exact provider type.
	Direct,
	/// The value stores an opaque handle to a polymorphic resource.
	Erased,
}

impl Erasure {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Direct => "direct",
			Self::Erased => "erased",
		}
	}
}

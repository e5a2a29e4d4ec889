use std::fmt;

/// A product term over up to 16 variables.
///
/// Bit `i` of `mask` is set when variable `i` appears as a literal; the
/// matching bit of `value` gives its polarity. Bits outside `mask` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cube {
    pub mask: u32,
    pub value: u32,
}

impl Cube {
    pub fn contains(&self, point: u32) -> bool {
        point & self.mask == self.value
    }

    pub fn literal_count(&self) -> u32 {
        self.mask.count_ones()
    }

    /// `(variable, positive)` pairs in variable order.
    pub fn literals(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        (0..u32::BITS)
            .filter(move |&i| self.mask & (1u32 << i) != 0)
            .map(move |i| (i, self.value & (1u32 << i) != 0))
    }
}

/// A sum of products; the result of minimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub num_vars: u32,
    pub cubes: Vec<Cube>,
}

impl Cover {
    /// Build a cover with cubes sorted by their literal sequence.
    pub fn new(num_vars: u32, mut cubes: Vec<Cube>) -> Self {
        cubes.sort_by_cached_key(|cube| cube.literals().collect::<Vec<_>>());
        Self { num_vars, cubes }
    }

    pub fn eval(&self, point: u32) -> bool {
        self.cubes.iter().any(|cube| cube.contains(point))
    }

    pub fn literal_count(&self) -> u32 {
        self.cubes.iter().map(Cube::literal_count).sum()
    }

    /// Render with a custom variable prefix, e.g. `Or(And(~x[0], x[1]), x[2])`.
    pub fn to_expr(&self, var: &str) -> String {
        Expr { cover: self, var }.to_string()
    }
}

struct Expr<'a> {
    cover: &'a Cover,
    var: &'a str,
}

impl Expr<'_> {
    fn write_cube(&self, f: &mut fmt::Formatter<'_>, cube: &Cube) -> fmt::Result {
        let literals = cube
            .literals()
            .map(|(i, positive)| {
                let neg = if positive { "" } else { "~" };
                format!("{neg}{}[{i}]", self.var)
            })
            .collect::<Vec<_>>();

        match literals.len() {
            0 => write!(f, "1"),
            1 => write!(f, "{}", literals[0]),
            _ => write!(f, "And({})", literals.join(", ")),
        }
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cubes = &self.cover.cubes;
        match cubes.len() {
            0 => write!(f, "0"),
            1 => self.write_cube(f, &cubes[0]),
            _ => {
                write!(f, "Or(")?;
                for (i, cube) in cubes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    self.write_cube(f, cube)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expr = Expr {
            cover: self,
            var: crate::logic::DEFAULT_VAR,
        };
        fmt::Display::fmt(&expr, f)
    }
}

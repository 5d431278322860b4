use crate::{
    context::Context,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// The most atoms a problem line may declare.
///
/// Declared atoms are allocated before any clause is read.
pub const DECLARED_ATOM_LIMIT: usize = 1 << 24;

/// Information gathered while reading a DIMACS formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms stated by the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses stated by the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms added to the context while reading.
    pub added_atoms: usize,

    /// The count of clauses added to the context while reading.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// Lines beginning with `c` are comments, the problem line `p cnf <atoms> <clauses>` is optional, and a line beginning with `%` ends the formula.
    /// Atoms declared on the problem line are part of the context, even if no clause mentions them.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 5 3
    ///  1  2    0
    /// -1  2    0
    ///     -2 3
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(5));
    /// assert_eq!(info.added_clauses, 3);
    /// assert_eq!(the_context.atom_count(), 5);
    /// ```
    #[allow(unused_labels)]
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_count();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('c') | None => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(1);

                    if problem_details.next() != Some("cnf") {
                        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                    }

                    let atom_count = parse_count(problem_details.next())?;
                    let clause_count = parse_count(problem_details.next())?;

                    if atom_count > DECLARED_ATOM_LIMIT {
                        return Err(ErrorKind::from(err::BuildError::AtomOverflow));
                    }
                    self.ensure_atoms(atom_count as Atom);

                    info.expected_atoms = Some(atom_count);
                    info.expected_clauses = Some(clause_count);

                    buffer.clear();
                    break;
                }

                // The line is part of the formula, and is kept in the buffer.
                _ => break,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }
                            _ => match item.parse::<CLiteral>() {
                                Ok(literal) => clause_buffer.push(literal),
                                Err(_) => {
                                    return Err(ErrorKind::from(err::ParseError::Literal(
                                        line_counter,
                                    )))
                                }
                            },
                        }
                    }
                }
            }

            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }
        }

        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_count() - initial_atoms;

        Ok(info)
    }
}

fn parse_count(detail: Option<&str>) -> Result<usize, ErrorKind> {
    match detail.map(|string| string.parse::<usize>()) {
        Some(Ok(count)) => Ok(count),
        _ => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    }
}

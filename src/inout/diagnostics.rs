use super::{Output, Relation};

/// `DUMP <alias>`: print the relation's tuples to the console.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    relation: &'a Relation,
}

impl<'a> Dump<'a> {
    pub fn new(relation: &'a Relation) -> Self {
        Dump { relation }
    }
}

impl Output for Dump<'_> {
    fn verb(&self) -> &'static str {
        "DUMP"
    }

    fn relation(&self) -> &Relation {
        self.relation
    }
}

/// `DESCRIBE <alias>`: print the relation's schema.
#[derive(Debug, Clone, Copy)]
pub struct Describe<'a> {
    relation: &'a Relation,
}

impl<'a> Describe<'a> {
    pub fn new(relation: &'a Relation) -> Self {
        Describe { relation }
    }
}

impl Output for Describe<'_> {
    fn verb(&self) -> &'static str {
        "DESCRIBE"
    }

    fn relation(&self) -> &Relation {
        self.relation
    }
}

/// `ILLUSTRATE <alias>`: run the plan on a sample.
#[derive(Debug, Clone, Copy)]
pub struct Illustrate<'a> {
    relation: &'a Relation,
}

impl<'a> Illustrate<'a> {
    pub fn new(relation: &'a Relation) -> Self {
        Illustrate { relation }
    }
}

impl Output for Illustrate<'_> {
    fn verb(&self) -> &'static str {
        "ILLUSTRATE"
    }

    fn relation(&self) -> &Relation {
        self.relation
    }
}

/// `EXPLAIN <alias>`: print the logical, physical and MapReduce plans.
#[derive(Debug, Clone, Copy)]
pub struct Explain<'a> {
    relation: &'a Relation,
}

impl<'a> Explain<'a> {
    pub fn new(relation: &'a Relation) -> Self {
        Explain { relation }
    }
}

impl Output for Explain<'_> {
    fn verb(&self) -> &'static str {
        "EXPLAIN"
    }

    fn relation(&self) -> &Relation {
        self.relation
    }
}

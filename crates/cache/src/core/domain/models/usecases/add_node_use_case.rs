#[derive(Debug)]
pub struct AddNodeUseCaseInput {
    pub address: String,
}

#[derive(Debug)]
pub struct AddNodeUseCaseOutput {
    pub node_id: String,
    pub vnodes: usize,
}

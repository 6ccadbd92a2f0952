mod test_mocks;

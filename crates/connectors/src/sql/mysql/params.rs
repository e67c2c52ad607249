use mysql_async::Value as MySqlValue;
use mysql_common::params::Params;

/// One text cell bound as a MySQL parameter.
pub struct MySqlParam(MySqlValue);

impl MySqlParam {
    pub fn from_text(value: &str) -> Self {
        MySqlParam(MySqlValue::Bytes(value.as_bytes().to_vec()))
    }
}

pub struct MySqlParamStore {
    pub params: Vec<MySqlParam>,
}

impl MySqlParamStore {
    pub fn from_values(values: &[String]) -> Self {
        let params = values.iter().map(|v| MySqlParam::from_text(v)).collect();
        MySqlParamStore { params }
    }

    pub fn into_params(self) -> Params {
        let mysql_values: Vec<MySqlValue> = self.params.into_iter().map(|p| p.0).collect();
        Params::Positional(mysql_values)
    }
}

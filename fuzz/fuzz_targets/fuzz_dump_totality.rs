#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use logsafe::opaque::DisplayHandle;
use logsafe::{List, Map, Value, dump};

const MAX_DEPTH: usize = 6;
const MAX_LEN: usize = 12;

#[derive(Arbitrary, Debug)]
struct Node {
    choice: u8,
}

impl Node {
    fn grow(
        &self,
        u: &mut arbitrary::Unstructured,
        depth: usize,
        ancestors: &mut Vec<Value>,
    ) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 12 {
            0 => Value::Null,
            1 => Value::from(u.arbitrary::<bool>()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => Value::from(u.arbitrary::<f64>()?),
            4 => Value::from(u.arbitrary::<String>()?),
            5 => Value::opaque(DisplayHandle::new(u.arbitrary::<u32>()?)),
            // Tie a cycle back to a container already on the path.
            6 if !ancestors.is_empty() => {
                let idx = u.int_in_range(0..=ancestors.len() - 1)?;
                ancestors[idx].clone()
            }
            6 => Value::Null,
            7 | 8 => {
                let list = List::new();
                let value = Value::Array(list.clone());
                ancestors.push(value.clone());
                let len = u.int_in_range(0..=MAX_LEN)?;
                for _ in 0..len {
                    let child: Node = u.arbitrary()?;
                    list.push(child.grow(u, depth + 1, ancestors)?);
                }
                ancestors.pop();
                value
            }
            9 => {
                let set = List::new();
                let value = Value::Set(set.clone());
                ancestors.push(value.clone());
                let len = u.int_in_range(0..=MAX_LEN)?;
                for _ in 0..len {
                    let child: Node = u.arbitrary()?;
                    set.push(child.grow(u, depth + 1, ancestors)?);
                }
                ancestors.pop();
                value
            }
            _ => {
                let map = Map::new();
                let value = Value::Object(map.clone());
                ancestors.push(value.clone());
                let len = u.int_in_range(0..=MAX_LEN)?;
                for _ in 0..len {
                    let key: String = u.arbitrary()?;
                    let child: Node = u.arbitrary()?;
                    map.insert(key, child.grow(u, depth + 1, ancestors)?);
                }
                ancestors.pop();
                value
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(node) = u.arbitrary::<Node>() {
        if let Ok(value) = node.grow(&mut u, 0, &mut Vec::new()) {
            let out = dump(&value);
            if let Err(e) = serde_json::from_str::<serde_json::Value>(&out) {
                panic!("dump produced invalid JSON!\nOutput: {}\nError: {}", out, e);
            }
        }
    }
});
